// Precomputed ziggurat layer tables for the normal and exponential
// samplers. Generated by tools/gen_ziggurat.py; see rng.rs for the layer
// geometry the constants encode. X/Y entries are layer coordinates divided
// by 2^63 so raw 63-bit uniforms can be applied as direct multipliers.

pub(crate) const NORM_X: [f64; 256] = [
    3.942166282539813e-19,
    3.7204945004119007e-19,
    3.582702448062867e-19,
    3.480747623654024e-19,
    3.399017717188213e-19,
    3.3303778360340134e-19,
    3.270943881761755e-19,
    3.2183577132495095e-19,
    3.1710758541840427e-19,
    3.128030740703406e-19,
    3.088452065580401e-19,
    3.0517650624107337e-19,
    3.017529029258459e-19,
    2.985398344070532e-19,
    2.955096746280179e-19,
    2.926399798849166e-19,
    2.899122586997747e-19,
    2.8731108780226286e-19,
    2.8482346327101326e-19,
    2.8243831535194375e-19,
    2.8014613964727016e-19,
    2.7793871261807787e-19,
    2.7580886921411202e-19,
    2.737503269830875e-19,
    2.7175754543391037e-19,
    2.6982561247538474e-19,
    2.67950151887715e-19,
    2.6612724730440033e-19,
    2.6435337927976633e-19,
    2.626253728202844e-19,
    2.609403533522414e-19,
    2.5929570954330997e-19,
    2.5768906173214717e-19,
    2.56118234977196e-19,
    2.5458123593393346e-19,
    2.530762329237245e-19,
    2.5160153867798386e-19,
    2.5015559533646177e-19,
    2.487369613540314e-19,
    2.4734430003079187e-19,
    2.459763694289271e-19,
    2.4463201347912436e-19,
    2.433101541113919e-19,
    2.420097842713294e-19,
    2.4072996170445865e-19,
    2.3946980340903333e-19,
    2.3822848067252655e-19,
    2.370052146193178e-19,
    2.3579927220741315e-19,
    2.3460996262069963e-19,
    2.334366340105445e-19,
    2.322786705467383e-19,
    2.311354897430376e-19,
    2.3000654002704233e-19,
    2.2889129852797606e-19,
    2.27789269059219e-19,
    2.266999802752732e-19,
    2.256229839852742e-19,
    2.2455785360727265e-19,
    2.235041827493391e-19,
    2.224615839051329e-19,
    2.214296872529625e-19,
    2.204081395485755e-19,
    2.1939660310297596e-19,
    2.1839475483749613e-19,
    2.174022854091685e-19,
    2.1641889840016514e-19,
    2.154443095657061e-19,
    2.1447824613540343e-19,
    2.1352044616350566e-19,
    2.12570657923951e-19,
    2.116286393465312e-19,
    2.106941574908202e-19,
    2.0976698805483462e-19,
    2.088469149156736e-19,
    2.079337296996363e-19,
    2.0702723137954102e-19,
    2.0612722589717124e-19,
    2.052335258089563e-19,
    2.0434594995315788e-19,
    2.0346432313698144e-19,
    2.025884758421641e-19,
    2.0171824394771305e-19,
    2.0085346846857524e-19,
    1.9999399530912008e-19,
    1.9913967503040575e-19,
    1.9829036263028137e-19,
    1.9744591733545163e-19,
    1.9660620240469845e-19,
    1.9577108494251475e-19,
    1.9494043572246298e-19,
    1.9411412901962151e-19,
    1.9329204245152923e-19,
    1.9247405682708156e-19,
    1.9166005600287062e-19,
    1.9084992674649814e-19,
    1.9004355860642328e-19,
    1.8924084378793713e-19,
    1.8844167703488424e-19,
    1.8764595551677734e-19,
    1.8685357872097435e-19,
    1.860644483496092e-19,
    1.8527846822098778e-19,
    1.8449554417517916e-19,
    1.8371558398354856e-19,
    1.8293849726199552e-19,
    1.821641953876738e-19,
    1.8139259141898436e-19,
    1.8062360001864444e-19,
    1.7985713737964733e-19,
    1.7909312115393833e-19,
    1.783314703836419e-19,
    1.775721054346842e-19,
    1.7681494793266387e-19,
    1.7605992070083135e-19,
    1.7530694770004404e-19,
    1.745559539705721e-19,
    1.7380686557563468e-19,
    1.7305960954655257e-19,
    1.72314113829409e-19,
    1.715703072331137e-19,
    1.7082811937877135e-19,
    1.7008748065025783e-19,
    1.6934832214591347e-19,
    1.6861057563126346e-19,
    1.6787417349268043e-19,
    1.6713904869190631e-19,
    1.6640513472135286e-19,
    1.656723655601024e-19,
    1.6494067563053266e-19,
    1.6420999975549115e-19,
    1.6348027311594532e-19,
    1.6275143120903658e-19,
    1.6202340980646722e-19,
    1.6129614491314931e-19,
    1.6056957272604592e-19,
    1.5984362959313481e-19,
    1.591182519724249e-19,
    1.5839337639095554e-19,
    1.5766893940370802e-19,
    1.569448775523589e-19,
    1.5622112732380264e-19,
    1.554976251083707e-19,
    1.547743071576727e-19,
    1.540511095419833e-19,
    1.5332796810709686e-19,
    1.5260481843056969e-19,
    1.518815957772668e-19,
    1.511582350541276e-19,
    1.5043467076406196e-19,
    1.4971083695888392e-19,
    1.4898666719118712e-19,
    1.4826209446506108e-19,
    1.4753705118554363e-19,
    1.4681146910669826e-19,
    1.4608527927820105e-19,
    1.4535841199031441e-19,
    1.4463079671711852e-19,
    1.4390236205786402e-19,
    1.4317303567630163e-19,
    1.424427442378347e-19,
    1.4171141334433205e-19,
    1.409789674664278e-19,
    1.4024532987312273e-19,
    1.395104225584902e-19,
    1.3877416616527562e-19,
    1.3803647990516373e-19,
    1.3729728147547161e-19,
    1.3655648697200814e-19,
    1.358140107978206e-19,
    1.3506976556752891e-19,
    1.343236620069241e-19,
    1.3357560884748258e-19,
    1.3282551271542042e-19,
    1.3207327801488085e-19,
    1.3131880680481522e-19,
    1.3056199866908074e-19,
    1.2980275057923786e-19,
    1.2904095674948605e-19,
    1.2827650848312724e-19,
    1.275092940098921e-19,
    1.267391983134048e-19,
    1.2596610294799507e-19,
    1.2518988584399371e-19,
    1.2441042110056516e-19,
    1.2362757876504156e-19,
    1.2284122459762062e-19,
    1.220512198201784e-19,
    1.2125742084782235e-19,
    1.2045967900166964e-19,
    1.1965784020118008e-19,
    1.1885174463419543e-19,
    1.1804122640264077e-19,
    1.1722611314162047e-19,
    1.1640622560939094e-19,
    1.1558137724540857e-19,
    1.1475137369333165e-19,
    1.1391601228549028e-19,
    1.1307508148492573e-19,
    1.1222836028063005e-19,
    1.1137561753107881e-19,
    1.1051661125053506e-19,
    1.0965108783189734e-19,
    1.0877878119905353e-19,
    1.0789941188076636e-19,
    1.070126859970362e-19,
    1.0611829414763264e-19,
    1.0521591019102906e-19,
    1.0430518990027529e-19,
    1.033857694803545e-19,
    1.0245726392923676e-19,
    1.0151926522209286e-19,
    1.0057134029488211e-19,
    9.961302879967256e-20,
    9.864384059945967e-20,
    9.766325296475556e-20,
    9.66707074276232e-20,
    9.566560624086644e-20,
    9.464730838043298e-20,
    9.361512501732327e-20,
    9.256831437088704e-20,
    9.150607583763853e-20,
    9.042754326772549e-20,
    8.933177723376345e-20,
    8.821775610232765e-20,
    8.708436567489209e-20,
    8.593038710961195e-20,
    8.475448276424413e-20,
    8.35551795084621e-20,
    8.233084893358512e-20,
    8.10796837291296e-20,
    7.979966928413361e-20,
    7.84885492860725e-20,
    7.714378370093446e-20,
    7.576249697946734e-20,
    7.434141357848509e-20,
    7.287677680737818e-20,
    7.13642454435251e-20,
    6.979876024076077e-20,
    6.817436894479873e-20,
    6.648399298619821e-20,
    6.471911034516243e-20,
    6.286931481310333e-20,
    6.092168754828088e-20,
    5.885987357557641e-20,
    5.666267511609055e-20,
    5.43018136308941e-20,
    5.173817174449371e-20,
    4.8915031722397986e-20,
    4.574474189075466e-20,
    4.2078802568582676e-20,
    3.7625986722403846e-20,
    3.1628589805880525e-20,
    0.0,
    0.0,
    0.0,
];
pub(crate) const NORM_Y: [f64; 256] = [
    1.4598410796619073e-22,
    3.0066613427942844e-22,
    4.61297288151036e-22,
    6.266335004923452e-22,
    7.959452476188168e-22,
    9.687465502170519e-22,
    1.1446877002379445e-21,
    1.3235036304379188e-21,
    1.5049857692053159e-21,
    1.6889653000719332e-21,
    1.8753025382711675e-21,
    2.0638798423695263e-21,
    2.2545966913644753e-21,
    2.4473661518801814e-21,
    2.6421122727763578e-21,
    2.8387681187879934e-21,
    3.0372742567457314e-21,
    3.237577569998665e-21,
    3.439630315794888e-21,
    3.643389365799791e-21,
    3.8488155868912455e-21,
    4.0558733309492866e-21,
    4.2645300104283665e-21,
    4.4747557422305164e-21,
    4.686523046535572e-21,
    4.899806590277535e-21,
    5.114582967210552e-21,
    5.330830508204615e-21,
    5.548529116703178e-21,
    5.767660125269048e-21,
    5.988206169917845e-21,
    6.210151079544228e-21,
    6.433479778225731e-21,
    6.658178198571403e-21,
    6.884233204589338e-21,
    7.111632522795728e-21,
    7.340364680490335e-21,
    7.570418950288666e-21,
    7.801785300138004e-21,
    8.034454348157032e-21,
    8.26841732173334e-21,
    8.50366602039153e-21,
    8.740192782010979e-21,
    8.977990452028216e-21,
    9.217052355306173e-21,
    9.457372270392917e-21,
    9.69894440592698e-21,
    9.941763378975877e-21,
    1.0185824195119847e-20,
    1.043112223011479e-20,
    1.0677653212987408e-20,
    1.092541321043202e-20,
    1.1174398612392903e-20,
    1.1424606118728722e-20,
    1.16760327268663e-20,
    1.192867572036102e-20,
    1.2182532658289374e-20,
    1.2437601365406778e-20,
    1.2693879923010665e-20,
    1.2951366660454148e-20,
    1.3210060147261467e-20,
    1.3469959185800735e-20,
    1.3731062804473653e-20,
    1.3993370251385617e-20,
    1.4256880988463145e-20,
    1.4521594685988384e-20,
    1.4787511217522917e-20,
    1.5054630655196176e-20,
    1.5322953265335227e-20,
    1.5592479504415063e-20,
    1.5863210015310346e-20,
    1.6135145623830997e-20,
    1.6408287335525604e-20,
    1.6682636332737947e-20,
    1.6958193971903133e-20,
    1.7234961781071128e-20,
    1.75129414576461e-20,
    1.7792134866331505e-20,
    1.8072544037271088e-20,
    1.8354171164377304e-20,
    1.8637018603838966e-20,
    1.8921088872801025e-20,
    1.9206384648209492e-20,
    1.949290876581566e-20,
    1.9780664219333884e-20,
    2.006965415974787e-20,
    2.035988189476089e-20,
    2.0651350888385735e-20,
    2.094406476067058e-20,
    2.12380272875575e-20,
    2.1533242400870524e-20,
    2.182971418843051e-20,
    2.2127446894294645e-20,
    2.2426444919118318e-20,
    2.2726712820637837e-20,
    2.3028255314272322e-20,
    2.3331077273843604e-20,
    2.363518373241333e-20,
    2.3940579883236398e-20,
    2.424727108083033e-20,
    2.4555262842160387e-20,
    2.4864560847940425e-20,
    2.5175170944049677e-20,
    2.5487099143065977e-20,
    2.5800351625916048e-20,
    2.6114934743643738e-20,
    2.6430855019297365e-20,
    2.6748119149937453e-20,
    2.706673400876629e-20,
    2.7386706647381235e-20,
    2.7708044298153606e-20,
    2.803075437673531e-20,
    2.8354844484695784e-20,
    2.868032241229166e-20,
    2.9007196141372144e-20,
    2.933547384842324e-20,
    2.9665163907754024e-20,
    2.999627489482865e-20,
    3.0328815589748086e-20,
    3.066279498088531e-20,
    3.099822226867879e-20,
    3.133510686958862e-20,
    3.1673458420220576e-20,
    3.201328678162302e-20,
    3.2354602043762624e-20,
    3.269741453018482e-20,
    3.3041734802864974e-20,
    3.338757366725737e-20,
    3.3734942177548944e-20,
    3.40838516421252e-20,
    3.443431362925625e-20,
    3.478633997301138e-20,
    3.5139942779411176e-20,
    3.5495134432826183e-20,
    3.585192760263246e-20,
    3.6210335250134166e-20,
    3.657037063576437e-20,
    3.693204732657589e-20,
    3.729537920403425e-20,
    3.766038047212639e-20,
    3.802706566579828e-20,
    3.8395449659736637e-20,
    3.8765547677510155e-20,
    3.91373753010864e-20,
    3.9510948480742166e-20,
    3.988628354538544e-20,
    4.026339721330859e-20,
    4.064230660339355e-20,
    4.1023029246790985e-20,
    4.140558309909645e-20,
    4.1789986553048835e-20,
    4.217625845177683e-20,
    4.2564418102621777e-20,
    4.2954485291566215e-20,
    4.334648029830014e-20,
    4.374042391195818e-20,
    4.413633744756377e-20,
    4.453424276321834e-20,
    4.4934162278076317e-20,
    4.5336118991149097e-20,
    4.574013650098453e-20,
    4.6146239026271345e-20,
    4.65544514274212e-20,
    4.6964799229185166e-20,
    4.737730864436501e-20,
    4.779200659868425e-20,
    4.820892075688818e-20,
    4.862807955014788e-20,
    4.90495122048477e-20,
    4.947324877284265e-20,
    4.989932016327772e-20,
    5.032775817606902e-20,
    5.0758595537153444e-20,
    5.1191865935622714e-20,
    5.162760406286608e-20,
    5.2065845653856434e-20,
    5.250662753072521e-20,
    5.294998764878346e-20,
    5.339596514515944e-20,
    5.384460039023759e-20,
    5.429593504209938e-20,
    5.475001210418389e-20,
    5.52068759864051e-20,
    5.566657256998385e-20,
    5.612914927627583e-20,
    5.659465513990254e-20,
    5.706314088652064e-20,
    5.753465901559699e-20,
    5.800926388859128e-20,
    5.848701182298764e-20,
    5.896796119265988e-20,
    5.945217253510356e-20,
    5.993970866612269e-20,
    6.043063480261903e-20,
    6.092501869420063e-20,
    6.142293076440296e-20,
    6.192444426240165e-20,
    6.242963542619406e-20,
    6.293858365833633e-20,
    6.345137171544768e-20,
    6.396808591283508e-20,
    6.448881634575286e-20,
    6.501365712899548e-20,
    6.554270665673183e-20,
    6.607606788473084e-20,
    6.661384863740433e-20,
    6.715616194241311e-20,
    6.770312639595071e-20,
    6.825486656224655e-20,
    6.881151341132796e-20,
    6.937320479965983e-20,
    6.994008599895925e-20,
    7.051231027927965e-20,
    7.109003955339732e-20,
    7.167344509064494e-20,
    7.226270830965594e-20,
    7.285802166105748e-20,
    7.345958961303594e-20,
    7.40676297549677e-20,
    7.468237403705296e-20,
    7.530407016722681e-20,
    7.593298319069869e-20,
    7.656939728248389e-20,
    7.721361778948781e-20,
    7.786597356641715e-20,
    7.852681965945689e-20,
    7.919654040385068e-20,
    7.98755530170381e-20,
    8.056431178890177e-20,
    8.126331299642632e-20,
    8.197310070370645e-20,
    8.269427365263418e-20,
    8.342749350883692e-20,
    8.417349480745354e-20,
    8.493309705283219e-20,
    8.570721957823104e-20,
    8.649689998593083e-20,
    8.730331729565548e-20,
    8.812782137885967e-20,
    8.897197092819682e-20,
    8.983758323931423e-20,
    9.072680069786971e-20,
    9.164218148406372e-20,
    9.258682640670295e-20,
    9.356456148027906e-20,
    9.458021001263637e-20,
    9.564001555085057e-20,
    9.675233477050335e-20,
    9.792885169780906e-20,
    9.918690585753157e-20,
    1.0055456271343423e-19,
    1.0208407377305596e-19,
    1.0390360993240749e-19,
    1.0842021724855044e-19,
    0.0,
    0.0,
];
pub(crate) const NORM_IPMF: [i64; 256] = [
    9223372036854775807,
    2699620411326423040,
    1900886952091623424,
    3671986283743264768,
    9022865200183021568,
    6522434035206866944,
    4723064097361313792,
    3360495653216339968,
    2289663232373841920,
    1423968905551859712,
    708364817826353152,
    106102487349331968,
    -408333464708362240,
    -853239722774877184,
    -1242095211828195328,
    -1585059631103797248,
    -1889943050286105600,
    -2162852901993452544,
    -2408637386597901312,
    -2631196530221997056,
    -2833704942567022592,
    -3018774288976313344,
    -3188573753513408512,
    -3344920681665158144,
    -3489349705109698560,
    -3623166100038978560,
    -3747487436860781568,
    -3863276422705517568,
    -3971367044067263488,
    -4072485557027093504,
    -4167267476830029824,
    -4256271432246936576,
    -4339990541934745600,
    -4418861817091712000,
    -4493273980423680000,
    -4563574004460321792,
    -4630072609732696064,
    -4693048910475389952,
    -4752754358826450432,
    -4809416110052621312,
    -4863239903584926208,
    -4914412541515309568,
    -4963104028437293568,
    -5009469424767256064,
    -5053650458861820928,
    -5095776932698288128,
    -5135967952550871552,
    -5174333008447966208,
    -5210972924992554496,
    -5245980700087973376,
    -5279442247504869376,
    -5311437055426362880,
    -5342038772348443648,
    -5371315728842577408,
    -5399331404571419648,
    -5426144845527707136,
    -5451811038486904832,
    -5476381248255742976,
    -5499903320557200384,
    -5522421955763366400,
    -5543978956094051840,
    -5564613449653428224,
    -5584362093444007424,
    -5603259257487901696,
    -5621337193102982144,
    -5638626184938548736,
    -5655154691215871488,
    -5670949470286350848,
    -5686035697645049344,
    -5700437072164221952,
    -5714175914228983296,
    -5727273255290416640,
    -5739748920264550400,
    -5751621603816387072,
    -5762908939808487424,
    -5773627565924779520,
    -5783793183106348032,
    -5793420610523731456,
    -5802523835849521664,
    -5811116062964840960,
    -5819209754503246336,
    -5826816672856394240,
    -5833947916829097984,
    -5840613956574313472,
    -5846824665594442752,
    -5852589350496176128,
    -5857916778475529728,
    -5862815203308702720,
    -5867292388936406016,
    -5871355631799431680,
    -5875011781261585408,
    -5878267258997833728,
    -5881128076594755072,
    -5883599852076460032,
    -5885687825234815488,
    -5887396872150906880,
    -5888731517961928192,
    -5889695949240145408,
    -5890294025712237056,
    -5890529289923491328,
    -5890404977640970752,
    -5889924026531028992,
    -5889089083905924096,
    -5887902514951500288,
    -5886366408906004480,
    -5884482585697868288,
    -5882252601306008064,
    -5879677752994556416,
    -5876759083780815360,
    -5873497386320622592,
    -5869893206521183232,
    -5865946846650871808,
    -5861658367294186496,
    -5857027590489297408,
    -5852054100132774400,
    -5846737243884550144,
    -5841076134098199040,
    -5835069647224270848,
    -5828716424758066688,
    -5822014871990114304,
    -5814963157319353856,
    -5807559211096688128,
    -5799800723460868096,
    -5791685142343447552,
    -5783209670965899264,
    -5774371264575938560,
    -5765166627051036672,
    -5755592207058368512,
    -5745644193499154432,
    -5735318510757647360,
    -5724610813399186432,
    -5713516480384816640,
    -5702030608525394944,
    -5690148005853428736,
    -5677863184134567424,
    -5665170350887008256,
    -5652063400922621440,
    -5638535906978783232,
    -5624581110032564736,
    -5610191908616248832,
    -5595360848140375040,
    -5580080108022273536,
    -5564341489846036480,
    -5548136403217822208,
    -5531455851553387520,
    -5514290416618186240,
    -5496630242204057600,
    -5478465016781996032,
    -5459783954960338432,
    -5440575777920578048,
    -5420828692397550592,
    -5400530368625260544,
    -5379667916724592640,
    -5358227861290574336,
    -5336196115241297920,
    -5313557951117033984,
    -5290297970614311424,
    -5266400072915089408,
    -5241847420194075648,
    -5216622401064553984,
    -5190706591696816640,
    -5164080714595108352,
    -5136724594159215616,
    -5108617109238325760,
    -5079736143408100352,
    -5050058530510542848,
    -5019559997012947456,
    -4988215101004244992,
    -4955997165613726720,
    -4922878208655121408,
    -4888828866775600128,
    -4853818314288614400,
    -4817814175785043968,
    -4780782432663903744,
    -4742687321730422784,
    -4703491227592094208,
    -4663154564967740416,
    -4621635653346880000,
    -4578890580373099520,
    -4534873055664885760,
    -4489534251661518848,
    -4442822631943593984,
    -4394683764783869952,
    -4345060121975024640,
    -4293890858757786624,
    -4241111576102327296,
    -4186654061722480640,
    -4130446006798451712,
    -4072410698655545344,
    -4012466683850416128,
    -3950527400320377856,
    -3886500774042184704,
    -3820288777448441856,
    -3751786943577673728,
    -3680883832463672320,
    -3607460442656990208,
    -3531389562490310656,
    -3452535052841203712,
    -3370751053428809728,
    -3285881101608309760,
    -3197757155330487296,
    -3106198503141443584,
    -3011010550895203328,
    -2911983463860748288,
    -2808890647498128384,
    -2701487041128951808,
    -2589507199701466112,
    -2472663129298541568,
    -2350641842159549440,
    -2223102583765390336,
    -2089673683739449344,
    -1949948966035341312,
    -1803483646855376896,
    -1649789631506562048,
    -1488330106121118720,
    -1318513295701131264,
    -1139685236981671936,
    -951121376560985088,
    -752016768180835328,
    -541474585660406784,
    -318492605749836800,
    -81947227207102464,
    169425512553156608,
    437052607265052672,
    722551297627383808,
    1027761939290122240,
    1354787941559646208,
    1706044619230740480,
    2084319374396123136,
    2492846399586908160,
    2935400169377284096,
    3416413484608843776,
    3941127949847906304,
    4515787798758445056,
    5147892401482223616,
    5846529325424320512,
    6622819682165114880,
    7490522659901396992,
    8466869998284306432,
    129208543809495040,
    -221159053564063744,
    -1837128529652916224,
    6940114448773881856,
    2156094899723788288,
    7409124184918052864,
    -1824169567489507328,
    -1793583675991343104,
    7235479153302732800,
    -843299634864050176,
    -2337738378068013056,
    646909790934990848,
    3802509988776644608,
    -3145571962085769216,
    4653834171025346560,
    -9223372036854775808,
    -9223372036854775808,
];
pub(crate) const NORM_MAP: [u8; 256] = [
    0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1, 1, 2, 241, 243, 245, 246, 246, 247, 248, 248, 249, 249, 249, 250, 250,
    250, 250, 251, 251, 251, 251, 251, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 3,
    239, 240, 241, 242, 243, 244, 245, 246, 247, 248, 249, 250, 251, 252, 253, 253,
];
pub(crate) const NORM_BINS: u8 = 253;
pub(crate) const NORM_J_INFLECTION: u8 = 204;
pub(crate) const NORM_X0: f64 = 3.6360066255009453;
pub(crate) const NORM_MAX_IE: i64 = 2269182951371003136;
pub(crate) const NORM_MIN_IE: i64 = 760463699974171904;

pub(crate) const EXP_X: [f64; 256] = [
    8.206624067534881e-19,
    7.397373235160727e-19,
    6.913331337791528e-19,
    6.564735882096452e-19,
    6.29125399598185e-19,
    6.065722412960496e-19,
    5.873527610373726e-19,
    5.705885052853693e-19,
    5.557094569162238e-19,
    5.423243890374395e-19,
    5.301529769650878e-19,
    5.189873925770806e-19,
    5.086692261799833e-19,
    4.990749293879647e-19,
    4.901062589444954e-19,
    4.816837901064919e-19,
    4.73742386536447e-19,
    4.662279580719682e-19,
    4.590950901778406e-19,
    4.523052779065816e-19,
    4.458255881635397e-19,
    4.39627631263684e-19,
    4.336867596710649e-19,
    4.279814361846974e-19,
    4.224927302706491e-19,
    4.172039125346413e-19,
    4.121001252246563e-19,
    4.071681122586925e-19,
    4.023959963100691e-19,
    3.9777309342877367e-19,
    3.9328975785334504e-19,
    3.889372512931033e-19,
    3.8470763218720385e-19,
    3.8059366138180143e-19,
    3.765887213854473e-19,
    3.726867469203018e-19,
    3.688821649224817e-19,
    3.6516984248800073e-19,
    3.615450415328748e-19,
    3.5800337915318032e-19,
    3.545407928453343e-19,
    3.511535098878424e-19,
    3.4783802030030957e-19,
    3.445910528890733e-19,
    3.414095539656331e-19,
    3.3829066838741153e-19,
    3.352317226228899e-19,
    3.3223020958685864e-19,
    3.292837750280446e-19,
    3.263902052820204e-19,
    3.23547416228108e-19,
    3.2075344331080775e-19,
    3.18006432504786e-19,
    3.153046321182083e-19,
    3.126463853426512e-19,
    3.1003012346934196e-19,
    3.074543597013729e-19,
    3.049176835000555e-19,
    3.0241875541094555e-19,
    2.999563023214454e-19,
    2.975291131074258e-19,
    2.9513603463113214e-19,
    2.9277596805684253e-19,
    2.9044786545442554e-19,
    2.88150726664167e-19,
    2.858835963990692e-19,
    2.8364556156331605e-19,
    2.814357487677979e-19,
    2.7925332202553115e-19,
    2.7709748061152865e-19,
    2.7496745707320223e-19,
    2.728625153787339e-19,
    2.707819491920604e-19,
    2.6872508026419036e-19,
    2.666912569315343e-19,
    2.6467985271278877e-19,
    2.6269026499668425e-19,
    2.6072191381359743e-19,
    2.5877424068465133e-19,
    2.5684670754248154e-19,
    2.5493879571835465e-19,
    2.530500049907747e-19,
    2.51179852691127e-19,
    2.49327872862278e-19,
    2.4749361546638655e-19,
    2.456766456384867e-19,
    2.438765429826784e-19,
    2.4209290090801527e-19,
    2.403253260014054e-19,
    2.3857343743505147e-19,
    2.368368664061465e-19,
    2.3511525560671253e-19,
    2.3340825872163284e-19,
    2.3171553995306794e-19,
    2.3003677356958333e-19,
    2.2837164347843477e-19,
    2.267198428195717e-19,
    2.250810735800193e-19,
    2.234550462273958e-19,
    2.218414793614077e-19,
    2.2024009938224414e-19,
    2.1865064017486837e-19,
    2.1707284280826706e-19,
    2.1550645524878668e-19,
    2.139512320867377e-19,
    2.124069342755063e-19,
    2.1087332888245868e-19,
    2.093501888509703e-19,
    2.0783729277295505e-19,
    2.0633442467130712e-19,
    2.0484137379170616e-19,
    2.0335793440326868e-19,
    2.0188390560756092e-19,
    2.0041909115551697e-19,
    1.9896329927183257e-19,
    1.975163424864309e-19,
    1.9607803747261946e-19,
    1.9464820489157864e-19,
    1.9322666924284316e-19,
    1.9181325872045647e-19,
    1.9040780507449482e-19,
    1.8901014347767506e-19,
    1.8762011239677479e-19,
    1.862375534686077e-19,
    1.8486231138030986e-19,
    1.834942337537057e-19,
    1.8213317103353303e-19,
    1.8077897637931715e-19,
    1.7943150556069484e-19,
    1.780906168559966e-19,
    1.7675617095390575e-19,
    1.754280308580195e-19,
    1.741060617941454e-19,
    1.7279013112017248e-19,
    1.714801082383637e-19,
    1.7017586450992066e-19,
    1.6887727317167832e-19,
    1.67584209254791e-19,
    1.6629654950527629e-19,
    1.6501417230628666e-19,
    1.6373695760198284e-19,
    1.6246478682288568e-19,
    1.611975428125862e-19,
    1.599351097556962e-19,
    1.586773731069231e-19,
    1.5742421952115544e-19,
    1.5617553678444597e-19,
    1.5493121374578021e-19,
    1.5369114024951994e-19,
    1.5245520706841021e-19,
    1.512233058370386e-19,
    1.499953289856356e-19,
    1.4877116967410352e-19,
    1.4755072172615974e-19,
    1.4633387956347966e-19,
    1.45120538139721e-19,
    1.4391059287430988e-19,
    1.4270393958586502e-19,
    1.415004744251338e-19,
    1.4030009380730888e-19,
    1.3910269434359025e-19,
    1.3790817277185197e-19,
    1.3671642588626657e-19,
    1.3552735046573443e-19,
    1.3434084320095726e-19,
    1.3315680061998683e-19,
    1.3197511901207143e-19,
    1.3079569434961212e-19,
    1.2961842220802955e-19,
    1.2844319768333097e-19,
    1.2726991530715216e-19,
    1.260984689590352e-19,
    1.2492875177568625e-19,
    1.237606560569394e-19,
    1.2259407316813328e-19,
    1.2142889343858442e-19,
    1.202650060558176e-19,
    1.1910229895518742e-19,
    1.179406587044942e-19,
    1.167799703831671e-19,
    1.1562011745554879e-19,
    1.1446098163777866e-19,
    1.133024427577256e-19,
    1.121443786073734e-19,
    1.1098666478700726e-19,
    1.0982917454048923e-19,
    1.0867177858084353e-19,
    1.0751434490529747e-19,
    1.0635673859884002e-19,
    1.0519882162526622e-19,
    1.0404045260457141e-19,
    1.0288148657544096e-19,
    1.0172177474144965e-19,
    1.0056116419943559e-19,
    9.939949764834669e-20,
    9.823661307666745e-20,
    9.70723434263201e-20,
    9.590651623069065e-20,
    9.473895322415421e-20,
    9.356946992015905e-20,
    9.239787515456947e-20,
    9.122397059055647e-20,
    9.004755018085287e-20,
    8.886839958264764e-20,
    8.768629551976746e-20,
    8.650100508607103e-20,
    8.531228498314122e-20,
    8.411988068438526e-20,
    8.292352551651347e-20,
    8.172293964803455e-20,
    8.051782897283927e-20,
    7.930788387509927e-20,
    7.809277785952446e-20,
    7.687216602842908e-20,
    7.564568338396516e-20,
    7.441294293017918e-20,
    7.317353354509339e-20,
    7.192701758763112e-20,
    7.067292819766685e-20,
    6.941076623950043e-20,
    6.813999682925652e-20,
    6.686004537461031e-20,
    6.557029304021015e-20,
    6.427007153336861e-20,
    6.295865708092366e-20,
    6.163526343814326e-20,
    6.029903373215182e-20,
    5.89490308928503e-20,
    5.758422635988605e-20,
    5.620348666959752e-20,
    5.480555741349944e-20,
    5.338904390900342e-20,
    5.195238771799004e-20,
    5.049383786633849e-20,
    4.9011415222629633e-20,
    4.750286793336625e-20,
    4.596561500126558e-20,
    4.4396673897997685e-20,
    4.279256630214872e-20,
    4.1149193273430135e-20,
    3.946166676260639e-20,
    3.772407713140178e-20,
    3.592916408620448e-20,
    3.40678366911007e-20,
    3.212844764156418e-20,
    3.009564691640014e-20,
    2.794846945559848e-20,
    2.5656913048718804e-20,
    2.3175209756804072e-20,
    2.0426695228251477e-20,
    1.72617703302137e-20,
    1.3281889259442856e-20,
    0.0,
    0.0,
    0.0,
    0.0,
];
pub(crate) const EXP_Y: [f64; 256] = [
    5.595205495112741e-23,
    1.1802509982703318e-22,
    1.844442338673585e-22,
    2.5439030466698337e-22,
    3.2737694311509377e-22,
    4.030773213270673e-22,
    4.812547831949516e-22,
    5.617291489658337e-22,
    6.443582054044355e-22,
    7.290266234346366e-22,
    8.156388845632191e-22,
    9.041145368348222e-22,
    9.94384884863992e-22,
    1.0863906045969115e-21,
    1.180079977546127e-21,
    1.2754075534831213e-21,
    1.3723331176377298e-21,
    1.470820879437521e-21,
    1.5708388257440434e-21,
    1.672358198437455e-21,
    1.7753530675030495e-21,
    1.8797999785104565e-21,
    1.9856776587832463e-21,
    2.09296677040532e-21,
    2.20164970099582e-21,
    2.3117103852306137e-21,
    2.423134151612543e-21,
    2.5359075901420854e-21,
    2.6500184374170512e-21,
    2.765455476366036e-21,
    2.882208448346859e-21,
    3.0002679757547704e-21,
    3.1196254936130373e-21,
    3.240273188880175e-21,
    3.362203946418709e-21,
    3.485411300740902e-21,
    3.6098893927859445e-21,
    3.7356329310971745e-21,
    3.8626371568620045e-21,
    3.9908978123552844e-21,
    4.1204111123918955e-21,
    4.251173718448894e-21,
    4.383182715163375e-21,
    4.5164355889510686e-21,
    4.650930208523482e-21,
    4.786664807109604e-21,
    4.923637966212002e-21,
    5.0618486007479046e-21,
    5.201295945443479e-21,
    5.341979542364899e-21,
    5.4838992294831034e-21,
    5.627055130180642e-21,
    5.7714476436192e-21,
    5.917077435895076e-21,
    6.0639454319177095e-21,
    6.212052807953177e-21,
    6.361400984780444e-21,
    6.511991621413648e-21,
    6.663826609348176e-21,
    6.816908067292634e-21,
    6.971238336352444e-21,
    7.126819975634088e-21,
    7.283655758242043e-21,
    7.441748667643025e-21,
    7.601101894374644e-21,
    7.76171883307755e-21,
    7.923603079832265e-21,
    8.086758429783492e-21,
    8.25118887503634e-21,
    8.416898602810335e-21,
    8.583891993838317e-21,
    8.752173620998655e-21,
    8.921748248170085e-21,
    9.092620829299662e-21,
    9.264796507675141e-21,
    9.438280615393843e-21,
    9.613078673021042e-21,
    9.78919638943143e-21,
    9.966639661827893e-21,
    1.014541457593265e-20,
    1.0325527406345968e-20,
    1.0506984617068682e-20,
    1.068979286218482e-20,
    1.0873958986701345e-20,
    1.1059490027542404e-20,
    1.1246393214695825e-20,
    1.1434675972510121e-20,
    1.1624345921140472e-20,
    1.1815410878142658e-20,
    1.2007878860214204e-20,
    1.2201758085082226e-20,
    1.2397056973538042e-20,
    1.2593784151618563e-20,
    1.2791948452935154e-20,
    1.29915589211506e-20,
    1.3192624812605432e-20,
    1.3395155599094813e-20,
    1.3599160970797786e-20,
    1.380465083936074e-20,
    1.4011635341137293e-20,
    1.4220124840587176e-20,
    1.4430129933836714e-20,
    1.4641661452404213e-20,
    1.4854730467093292e-20,
    1.5069348292058096e-20,
    1.5285526489044065e-20,
    1.5503276871808635e-20,
    1.5722611510726408e-20,
    1.5943542737583546e-20,
    1.6166083150566705e-20,
    1.6390245619451953e-20,
    1.661604329099959e-20,
    1.684348959456108e-20,
    1.7072598247904713e-20,
    1.7303383263267072e-20,
    1.7535858953637607e-20,
    1.7770039939284238e-20,
    1.8005941154528283e-20,
    1.8243577854777395e-20,
    1.8482965623825808e-20,
    1.872412038143162e-20,
    1.896705839118145e-20,
    1.921179626865319e-20,
    1.945835098988848e-20,
    1.9706739900186862e-20,
    1.9956980723234347e-20,
    2.020909157057989e-20,
    2.046309095147388e-20,
    2.0718997783083578e-20,
    2.0976831401101335e-20,
    2.1236611570762115e-20,
    2.1498358498287958e-20,
    2.1762092842777847e-20,
    2.2027835728562577e-20,
    2.2295608758045207e-20,
    2.256543402504903e-20,
    2.283733412869599e-20,
    2.3111332187839995e-20,
    2.338745185608085e-20,
    2.3665717337386093e-20,
    2.3946153402349595e-20,
    2.4228785405117392e-20,
    2.45136393010132e-20,
    2.4800741664897755e-20,
    2.509011971029844e-20,
    2.5381801309347597e-20,
    2.5675815013570497e-20,
    2.5972190075566327e-20,
    2.6270956471628247e-20,
    2.6572144925351517e-20,
    2.6875786932281835e-20,
    2.718191478565915e-20,
    2.7490561603315974e-20,
    2.7801761355793055e-20,
    2.811554889573917e-20,
    2.8431959988666534e-20,
    2.875103134513784e-20,
    2.9072800654466313e-20,
    2.939730662001549e-20,
    2.9724588996191657e-20,
    3.005468862722811e-20,
    3.038764748786764e-20,
    3.072350872605708e-20,
    3.106231670777591e-20,
    3.1404117064129997e-20,
    3.1748956740850975e-20,
    3.209688405035237e-20,
    3.244794872650492e-20,
    3.280220198230602e-20,
    3.315969657063138e-20,
    3.352048684827224e-20,
    3.3884628843476894e-20,
    3.4252180327233346e-20,
    3.462320088854865e-20,
    3.499775201400169e-20,
    3.537589717186907e-20,
    3.575770190114905e-20,
    3.6143233905835805e-20,
    3.653256315482742e-20,
    3.6925761987883584e-20,
    3.7322905228087e-20,
    3.772407030130213e-20,
    3.8129337363171053e-20,
    3.8538789434235246e-20,
    3.8952512543827874e-20,
    3.93705958834424e-20,
    3.979313197035144e-20,
    4.022021682232577e-20,
    4.065195014438813e-20,
    4.1088435528630944e-20,
    4.152978066823271e-20,
    4.197609758692659e-20,
    4.242750288530745e-20,
    4.28841180055136e-20,
    4.3346069515987447e-20,
    4.381348941821026e-20,
    4.428651547752084e-20,
    4.476529158037235e-20,
    4.52499681206583e-20,
    4.574070241805441e-20,
    4.6237659171683015e-20,
    4.674101095281837e-20,
    4.7250938740823415e-20,
    4.776763250705121e-20,
    4.829129185206989e-20,
    4.882212670229279e-20,
    4.9360358072933834e-20,
    4.9906218905182e-20,
    5.045995498662552e-20,
    5.10218259652853e-20,
    5.159210646917823e-20,
    5.217108734516921e-20,
    5.2759077033045265e-20,
    5.335640309332584e-20,
    5.3963413910399493e-20,
    5.458048059625922e-20,
    5.520799912453555e-20,
    5.584639272987381e-20,
    5.649611461419373e-20,
    5.715765100929066e-20,
    5.783152465495658e-20,
    5.851829876379429e-20,
    5.921858155879166e-20,
    5.993303148833865e-20,
    6.066236324679683e-20,
    6.140735475843493e-20,
    6.216885532049969e-20,
    6.294779515010367e-20,
    6.374519664321432e-20,
    6.456218773753791e-20,
    6.540001788188903e-20,
    6.626007726330927e-20,
    6.714392014514654e-20,
    6.805329344730161e-20,
    6.899017208813292e-20,
    6.995680315856441e-20,
    7.095576179487836e-20,
    7.1990022788945e-20,
    7.306305373910537e-20,
    7.417893826626681e-20,
    7.534254213417305e-20,
    7.65597421711429e-20,
    7.783774986341275e-20,
    7.918558267402942e-20,
    8.06147755373532e-20,
    8.214050276981796e-20,
    8.378344597828041e-20,
    8.557312924967804e-20,
    8.755445966958997e-20,
    8.980238805770673e-20,
    9.24624714211509e-20,
    9.591964134495148e-20,
    1.0842021724855044e-19,
    0.0,
    0.0,
    0.0,
];
pub(crate) const EXP_IPMF: [i64; 256] = [
    9223372036854775807,
    -469996330472558592,
    5771251231434977280,
    9085864503819444224,
    -2135993274717945856,
    3492115588903546880,
    751254819606237184,
    7673130333659267072,
    6220332867583102976,
    5045979640552460288,
    4075305837223690240,
    3258413672162420736,
    2560664887087566848,
    1957224924673159168,
    1429800935350095872,
    964606309711144960,
    551043923599128576,
    180827629096636416,
    -152619738120347648,
    -454588624410169344,
    -729385126148489216,
    -980551509819077632,
    -1211029700668106752,
    -1423284293868428288,
    -1619396356369650688,
    -1801135830955689984,
    -1970018048575832064,
    -2127348289059649536,
    -2274257249303490560,
    -2411729520096995328,
    -2540626634158989312,
    -2661705860113456128,
    -2775635634532537344,
    -2883008316030210048,
    -2984350790384110592,
    -3080133339198145536,
    -3170777096303951872,
    -3256660348484336640,
    -3338123885074331648,
    -3415475560472261632,
    -3488994201966882816,
    -3558932970354125824,
    -3625522261069146112,
    -3688972217741550592,
    -3749474917564948480,
    -3807206277530460160,
    -3862327722495908864,
    -3914987649158092800,
    -3965322714630854656,
    -4013458973777007616,
    -4059512885612384256,
    -4103592206187499520,
    -4145796782585351168,
    -4186219260695612416,
    -4224945717447165952,
    -4262056226866071552,
    -4297625367835968512,
    -4331722680528995328,
    -4364413077438464000,
    -4395757214228676608,
    -4425811824913153024,
    -4454630025298377728,
    -4482261588141014016,
    -4508753193106733056,
    -4534148654079014912,
    -4558489126277609472,
    -4581813295191356416,
    -4604157549137884160,
    -4625556137149395968,
    -4646041313518940672,
    -4665643470411788800,
    -4684391259531112448,
    -4702311703969984512,
    -4719430301147917824,
    -4735771117536669184,
    -4751356876104199168,
    -4766209036860189696,
    -4780347871383514112,
    -4793792531640281600,
    -4806561113634302464,
    -4818670716410194432,
    -4830137496634058752,
    -4840976719261132800,
    -4851202804489906176,
    -4860829371376920064,
    -4869869278311802368,
    -4878334660640368128,
    -4886236965618574848,
    -4893586984901207552,
    -4900394884771865600,
    -4906670234239296512,
    -4912422031162860544,
    -4917658726580020224,
    -4922388247286572032,
    -4926618016851682304,
    -4930354975162754048,
    -4933605596537938432,
    -4936375906577277440,
    -4938671497739690496,
    -4940497543855071744,
    -4941858813450904064,
    -4942759682132337152,
    -4943204143995806208,
    -4943195822022844928,
    -4942737977810018816,
    -4941833520253952512,
    -4940485013593580032,
    -4938694684625527296,
    -4936464429286089216,
    -4933795818459292160,
    -4930690103118455808,
    -4927148218890249216,
    -4923170790009791488,
    -4918758132525622272,
    -4913910257085375488,
    -4908626871125337088,
    -4902907380355097600,
    -4896750889840731136,
    -4890156204543370752,
    -4883121829157725696,
    -4875645967648220672,
    -4867726521989785088,
    -4859361090674288128,
    -4850546966343247872,
    -4841281133213968384,
    -4831560263699720192,
    -4821380714616121344,
    -4810738522786163200,
    -4799629400105216512,
    -4788048727937182208,
    -4775991551010335744,
    -4763452570641034240,
    -4750426137330641920,
    -4736906242696867328,
    -4722886510748298752,
    -4708360188440800768,
    -4693320135463727104,
    -4677758813316378624,
    -4661668273549668864,
    -4645040145182290432,
    -4627865621183656960,
    -4610135444142093312,
    -4591839890848150528,
    -4572968755929085952,
    -4553511334360709120,
    -4533456402849265664,
    -4512792200035891200,
    -4491506405369379840,
    -4469586116675435520,
    -4447017826236955648,
    -4423787395381001216,
    -4399880027457912832,
    -4375280239011627008,
    -4349971829194686464,
    -4323937847118857216,
    -4297160557215810560,
    -4269621402210994176,
    -4241300963842525184,
    -4212178920813168640,
    -4182234004213271552,
    -4151443949665717248,
    -4119785446662017024,
    -4087234084100968448,
    -4053764292393373696,
    -4019349281476514816,
    -3983960974549914624,
    -3947569937261860864,
    -3910145301791840256,
    -3871654685606484992,
    -3832064104435227648,
    -3791337878617661440,
    -3749438533126266880,
    -3706326689445520384,
    -3661960950044502016,
    -3616297773528328192,
    -3569291340408368128,
    -3520893408451308544,
    -3471053156458377216,
    -3419717015791154176,
    -3366828488041116672,
    -3312327947820414976,
    -3256152429335755776,
    -3198235394675392512,
    -3138506482555240448,
    -3076891235265364992,
    -3013310801394485248,
    -2947681612397628416,
    -2879915029674151936,
    -2809916959118676992,
    -2737587429952018432,
    -2662820133573319680,
    -2585501917734068224,
    -2505512231582131200,
    -2422722515209381888,
    -2336995527532571648,
    -2248184604981030912,
    -2156132842513200128,
    -2060672187258469376,
    -1961622433941520384,
    -1858790108938208256,
    -1751967229008776192,
    -1640929916930592768,
    -1525436855621883904,
    -1405227557072772096,
    -1280020420667483136,
    -1149510549543169024,
    -1013367289572340736,
    -871231448625035264,
    -722712146453839872,
    -567383236777723904,
    -404779231966254080,
    -234390647593360384,
    -55658667968160768,
    132030985917829120,
    329355128889542656,
    537061297995249664,
    755977262689546240,
    987022116618362880,
    1231219266824558592,
    1489711711333500928,
    1763780090203584512,
    2054864117347231744,
    2364588157605353472,
    2694791916988762112,
    3047567482885339136,
    3425304305827405824,
    3830744187113656320,
    4267048975700146176,
    4737884547963756544,
    5247525842213732352,
    5800989391529502720,
    6404202163008751616,
    7064218894230921216,
    7789505049448970240,
    8590309807778189312,
    452596617758699520,
    196804161245859840,
    -1051382569567985664,
    8470193856879828992,
    4843873696942731264,
    -224438070012407808,
    5043569784941547520,
    8480001863866744832,
    -2481291940378996736,
    8317609097271230464,
    3632346554472087552,
    7373871982326124544,
    5971274373353361408,
    -2487543359387205632,
    4990347083553087488,
    -2807823001521737728,
    2051009041233772544,
    -4307727608845234176,
    -9223372036854775808,
    -9223372036854775808,
    -9223372036854775808,
];
pub(crate) const EXP_MAP: [u8; 256] = [
    0, 0, 1, 2, 3, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 4, 237,
    240, 241, 243, 243, 244, 245, 245, 246, 246, 247, 247, 248, 248, 248, 248, 249,
    249, 249, 249, 250, 250, 250, 250, 250, 250, 250, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 6, 235, 236, 237, 238,
    239, 240, 241, 242, 243, 244, 245, 246, 247, 248, 249, 250, 251, 252, 252, 252,
];
pub(crate) const EXP_LAYERS: u8 = 252;
pub(crate) const EXP_X0: f64 = 7.569274694148062;
pub(crate) const EXP_MAX_IE: i64 = 853965780256996608;
